use opentelemetry::{KeyValue, metrics::UpDownCounter};
use std::sync::LazyLock;

static STATDS: LazyLock<UpDownCounter<i64>> = LazyLock::new(|| {
    logfire::i64_up_down_counter("echo_bot_statds")
        .with_description("Echo bot app statistics")
        .with_unit("attempt")
        .build()
});

fn incr_statds(metric: String, value: String) {
    STATDS.add(1, &[KeyValue::new(metric, value)]);
}

pub fn incr_register_chat_statds() {
    incr_statds("register_chat".to_string(), "created".into())
}

pub fn incr_webhook_reply_statds(reply_kind: &str) {
    incr_statds("reply".to_string(), reply_kind.into())
}

pub fn incr_webhook_error_statds(error_kind: &str) {
    incr_statds("webhook_error".to_string(), error_kind.into())
}
