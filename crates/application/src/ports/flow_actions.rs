//! Flow actions port - Interface for applying decisions to a request

use domain::Decision;

/// Port the interception host implements to apply a decision to one
/// in-flight request
///
/// Exactly one action is taken per decision: `Respond` short-circuits the
/// request with a synthetic response, `Abort` kills the underlying
/// connection without answering, and `PassThrough` touches nothing (the
/// host forwards to the real upstream).
#[cfg_attr(test, mockall::automock)]
pub trait FlowActions {
    /// Substitute a synthetic response for the real upstream's
    fn respond(&mut self, status: u16, content_type: &'static str, body: &'static str);

    /// Terminate the connection without sending any HTTP response
    fn abort(&mut self);
}

/// Apply a decision through the host's flow actions
///
/// Pass-through decisions deliberately invoke nothing, so the host's
/// normal forwarding path runs unmodified.
pub fn apply_decision<F: FlowActions>(decision: Decision, flow: &mut F) {
    match decision {
        Decision::PassThrough => {},
        Decision::Respond(response) => {
            flow.respond(response.status, response.content_type, response.body);
        },
        Decision::Abort => flow.abort(),
    }
}
