use crate::{
    domain::error::DomainError,
    presentation::http::{HttpResponse, error_response, ok, server_error},
    usecase::presenter::Presenter,
};

/// Collects an interactor outcome as an [`HttpResponse`]
pub struct HttpPresenter<T> {
    response: Option<HttpResponse<T>>,
}

impl<T> HttpPresenter<T> {
    pub fn new() -> Self {
        Self { response: None }
    }

    /// An interactor that never presented anything yields a 500
    pub fn into_response(self) -> HttpResponse<T> {
        self.response
            .unwrap_or_else(|| server_error("no response was presented"))
    }
}

impl<T> Default for HttpPresenter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send> Presenter<T> for HttpPresenter<T> {
    fn reply(&mut self, response: T) {
        self.response = Some(ok(response));
    }

    fn throw(&mut self, error: DomainError) {
        self.response = Some(error_response(error));
    }
}
