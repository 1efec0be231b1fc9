use phonebook::Url;

/// Trim a user supplied string, treating blank values as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Determine a sensible default prompt title for the given endpoint.
pub(super) fn default_title_for(endpoint: &Url) -> String {
    match endpoint.host_str() {
        Some(host) => match endpoint.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        },
        None => "phonebook".to_string(),
    }
}
