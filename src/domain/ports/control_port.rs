/// Handle to the on-screen control that triggered an operation.
pub trait ControlHandle: Send + Sync {
    /// Shows or clears the control's "in progress" state.
    fn set_loading(&self, loading: bool);
}
