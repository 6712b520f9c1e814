use serde::Deserialize;

/// Body for POST /user and DELETE /user. A missing field deserializes to
/// an empty string and is rejected by the handler with 400.
#[derive(Debug, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_email_defaults_to_empty() {
        let req: UserRequest = serde_json::from_str("{}").unwrap();
        assert!(req.email.is_empty());
    }
}
