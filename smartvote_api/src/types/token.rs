use serde::Deserialize;

/// Body of the `/auth/token` endpoint.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::TokenResponse;

    #[test]
    fn token_field_required() {
        let ok: TokenResponse = serde_json::from_str(r#"{"token":"abc","ttl":3600}"#).unwrap();
        assert_eq!(ok.token, "abc");

        assert!(serde_json::from_str::<TokenResponse>(r#"{"jwt":"abc"}"#).is_err());
    }
}
