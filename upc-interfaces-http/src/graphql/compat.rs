// Canonical wording for engine-produced validation messages

use async_graphql::Response;

use upc_domain::argument_type;

const MISSING_ARGUMENT_SUFFIX: &str = "is required but not provided";

/// Rewrites every missing-required-argument error in `response` to
/// `Field "<field>" argument "<arg>" of type "<Type>" is required but not provided.`
/// using the declared argument type.
pub fn normalize_missing_argument_errors(response: &mut Response) {
    for error in &mut response.errors {
        if let Some(message) = canonical_missing_argument(&error.message) {
            error.message = message;
        }
    }
}

pub fn canonical_missing_argument(message: &str) -> Option<String> {
    let (field, argument) = parse_missing_argument(message)?;
    let type_name = argument_type(field, argument)?;
    Some(format!(
        "Field \"{}\" argument \"{}\" of type \"{}\" {}.",
        field, argument, type_name, MISSING_ARGUMENT_SUFFIX
    ))
}

fn parse_missing_argument(message: &str) -> Option<(&str, &str)> {
    let rest = message.strip_prefix("Field \"")?;
    let (field, rest) = rest.split_once('"')?;
    let rest = rest.strip_prefix(" argument \"")?;
    let (argument, rest) = rest.split_once('"')?;
    if !rest.contains(MISSING_ARGUMENT_SUFFIX) {
        return None;
    }
    Some((field, argument))
}
