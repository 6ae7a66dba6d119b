use crate::domain::error::DomainError;

/// Output port of an interactor.
///
/// Exactly one of the two channels is called per execution.
pub trait Presenter<T>: Send {
    /// Success channel
    fn reply(&mut self, response: T);

    /// Error channel
    fn throw(&mut self, error: DomainError);
}
