//! Translation of request-body deserialization failures into 400 responses.
//!
//! A deserialization failure usually arrives wrapped several layers deep
//! (extractor rejection, boxed framework error, path-tracking deserializer
//! error). The client gets the message of the innermost error only.

use std::error::Error;

use axum::http::StatusCode;

/// Walk `source()` to the innermost error of the chain.
pub fn root_cause<'a>(err: &'a (dyn Error + 'static)) -> &'a (dyn Error + 'static) {
    let mut current = err;
    while let Some(next) = current.source() {
        current = next;
    }
    current
}

/// Map a payload deserialization failure to `(400, root cause message)`.
pub fn payload_error(err: &(dyn Error + 'static)) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, root_cause(err).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fmt;

    #[derive(Debug)]
    struct Leaf(String);

    impl fmt::Display for Leaf {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl Error for Leaf {}

    #[derive(Debug)]
    struct Wrapped {
        context: &'static str,
        inner: Box<dyn Error + Send + Sync>,
    }

    impl fmt::Display for Wrapped {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.context)
        }
    }

    impl Error for Wrapped {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&*self.inner)
        }
    }

    fn wrap(message: &str, depth: usize) -> Box<dyn Error + Send + Sync> {
        let mut err: Box<dyn Error + Send + Sync> = Box::new(Leaf(message.to_string()));
        for _ in 0..depth {
            err = Box::new(Wrapped {
                context: "Failed to deserialize the JSON body into the target type",
                inner: err,
            });
        }
        err
    }

    #[test]
    fn unwrapped_error_is_its_own_root() {
        let err = Leaf("bad".into());
        assert_eq!(root_cause(&err).to_string(), "bad");
    }

    #[test]
    fn root_cause_skips_wrappers() {
        let err = wrap("invalid type: integer `5`, expected a string", 3);
        assert_eq!(
            root_cause(&*err).to_string(),
            "invalid type: integer `5`, expected a string"
        );
    }

    #[test]
    fn serde_json_error_message_survives() {
        let err = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let expected = err.to_string();
        let wrapped = Wrapped {
            context: "outer",
            inner: Box::new(err),
        };
        let (status, body) = payload_error(&wrapped);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, expected);
    }

    proptest! {
        #[test]
        fn any_chain_translates_to_400_with_root_message(message in ".*", depth in 0usize..6) {
            let err = wrap(&message, depth);
            let (status, body) = payload_error(&*err);
            prop_assert_eq!(status, StatusCode::BAD_REQUEST);
            prop_assert_eq!(body, message);
        }
    }
}
