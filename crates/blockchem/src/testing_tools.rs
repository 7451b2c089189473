// NOTE: Wide enough that none of the reports in this crate get wrapped
macro_rules! assert_miette_snapshot {
    ($diag:expr, @$snapshot:literal) => {{
        use insta::{assert_snapshot, with_settings};
        use miette::{GraphicalReportHandler, GraphicalTheme};

        let mut out = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .with_width(120)
            .render_report(&mut out, &$diag.unwrap_err())
            .unwrap();
        with_settings!({
            description => stringify!($diag)
        }, {
            assert_snapshot!(out, @$snapshot);
        });
    }};
}

pub(crate) use assert_miette_snapshot;
