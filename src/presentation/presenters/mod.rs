pub mod http_presenter;
