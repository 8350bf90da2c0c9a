//! Wire compatibility checks for encoded payloads.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use fragment_stream::{DecodeError, STREAM_MEDIA_TYPE, StreamPayload, TargetId, TargetIdError};

fn target(raw: &str) -> TargetId {
    TargetId::new(raw).expect("valid target")
}

#[test]
fn payload_survives_the_wire() {
    let payload = StreamPayload::new()
        .with_replace(
            target("member-description"),
            "<div id=\"member-description\"><p>Senior engineer.</p></div>",
        )
        .with_replace(target("modal"), "<div id=\"modal\"></div>");

    let decoded = StreamPayload::decode(&payload.encode()).expect("decodes");
    assert_eq!(decoded, payload);
}

#[test]
fn invalid_target_on_the_wire_is_reported() {
    let body = "<turbo-stream action=\"replace\" target=\"\"><template>x</template></turbo-stream>";
    assert_eq!(
        StreamPayload::decode(body),
        Err(DecodeError::InvalidTarget(TargetIdError::Empty))
    );
}

#[test]
fn media_type_matches_the_stream_convention() {
    assert_eq!(STREAM_MEDIA_TYPE, "text/vnd.turbo-stream.html");
}
