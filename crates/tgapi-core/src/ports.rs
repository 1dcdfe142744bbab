use async_trait::async_trait;

use crate::{
    codec::to_vec,
    config::CodecConfig,
    envelope::{decode_response, ApiResponse},
    methods::Method,
    Error, Result,
};

/// Hexagonal port for the HTTP side of the Bot API.
///
/// Implementations POST `body` as JSON to `.../bot<token>/<method>` and hand
/// back the raw response bytes, whatever the HTTP status. Failures to reach the
/// API map to [`Error::External`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, method: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Perform one API call: encode the request, send it, decode the envelope with
/// the method's payload type.
pub async fn call<T, M>(transport: &T, config: &CodecConfig, method: &M) -> Result<M::Output>
where
    T: Transport + ?Sized,
    M: Method + Sync,
{
    let body = to_vec(method);

    #[cfg(feature = "tracing")]
    tracing::debug!(method = M::NAME, bytes = body.len(), "bot api call");

    let raw = transport.post_json(M::NAME, body).await?;
    match decode_response::<M::Output>(&raw, config)? {
        ApiResponse::Success { result, .. } => Ok(result),
        ApiResponse::Failure(err) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                method = M::NAME,
                error_code = err.error_code,
                description = err.description.as_deref(),
                "bot api returned an error"
            );

            Err(Error::Api(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use serde_json::{json, Value};

    use super::*;
    use crate::{
        errors::DecodeError,
        methods::{ChatId, GetChatMembersCount, GetMe, SendMessage},
    };

    /// Replays canned responses and records what was sent.
    #[derive(Default)]
    struct FakeTransport {
        responses: Mutex<Vec<Vec<u8>>>,
        sent: Mutex<Vec<(String, Value)>>,
    }

    impl FakeTransport {
        fn replying(responses: &[Value]) -> Self {
            Self {
                responses: Mutex::new(
                    responses.iter().rev().map(|v| v.to_string().into_bytes()).collect(),
                ),
                sent: Mutex::default(),
            }
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn post_json(&self, method: &str, body: Vec<u8>) -> Result<Vec<u8>> {
            let body: Value = serde_json::from_slice(&body)?;
            self.sent.lock().unwrap().push((method.to_string(), body));
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| Error::External("no canned response left".to_string()))
        }
    }

    #[tokio::test]
    async fn call_decodes_the_method_payload() {
        let transport = FakeTransport::replying(&[json!({
            "ok": true,
            "result": {"message_id": 5, "date": 1, "chat": {"id": 9, "type": "private"}, "text": "hi"}
        })]);
        let msg = call(&transport, &CodecConfig::default(), &SendMessage::new(9_i64, "hi"))
            .await
            .unwrap();
        assert_eq!(msg.message_id, 5);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent[0], ("sendMessage".to_string(), json!({"chat_id": 9, "text": "hi"})));
    }

    #[tokio::test]
    async fn api_failures_become_api_errors() {
        let transport = FakeTransport::replying(&[json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })]);
        let err = call(&transport, &CodecConfig::default(), &GetMe::default())
            .await
            .unwrap_err();
        match err {
            Error::Api(api) => assert_eq!(api.error_code, Some(400)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn wrong_payload_type_is_a_decode_error() {
        let transport = FakeTransport::replying(&[json!({"ok": true, "result": "many"})]);
        let req = GetChatMembersCount {
            chat_id: ChatId::Id(-100),
        };
        let err = call(&transport, &CodecConfig::default(), &req)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeError::TypeMismatch { ref field, .. }) if field == "result"
        ));
    }

    #[tokio::test]
    async fn transport_failures_pass_through() {
        let transport = FakeTransport::default();
        let err = call(&transport, &CodecConfig::default(), &GetMe::default())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::External(_)));
    }
}
