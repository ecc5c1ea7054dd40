//! Authorization attribute lookups.
//!
//! The custom authorizer attaches the examiner's identity to the request
//! context. These lookups never fail: any missing or mistyped layer
//! collapses to `None`, leaving the decision with the caller.

use crate::events::RequestContext;

/// The authenticated examiner's staff number, when set by the authorizer.
pub fn staff_number_from_request_context(
    request_context: Option<&RequestContext>,
) -> Option<&str> {
    authorizer_string(request_context, "staffNumber")
}

/// The authenticated examiner's role, when set by the authorizer.
pub fn role_from_request_context(request_context: Option<&RequestContext>) -> Option<&str> {
    authorizer_string(request_context, "examinerRole")
}

fn authorizer_string<'a>(
    request_context: Option<&'a RequestContext>,
    field: &str,
) -> Option<&'a str> {
    request_context?.authorizer.as_ref()?.get(field)?.as_str()
}
