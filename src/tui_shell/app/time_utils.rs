use super::*;

const TS_UI: &[BorrowedFormatItem<'static>] =
    format_description!("[hour padding:zero]:[minute padding:zero]:[second padding:zero]Z");

pub(in crate::tui_shell) fn fmt_ts_ui(ts: &str) -> String {
    OffsetDateTime::parse(ts, &Rfc3339)
        .ok()
        .and_then(|dt| dt.format(TS_UI).ok())
        .unwrap_or_else(|| ts.to_string())
}

pub(in crate::tui_shell) fn now_ts() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_time_of_day_or_raw_text() {
        assert_eq!(fmt_ts_ui("2026-10-19T08:05:09Z"), "08:05:09Z");
        assert_eq!(fmt_ts_ui("later"), "later");
    }
}
