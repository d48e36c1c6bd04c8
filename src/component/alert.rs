use crate::Result;
use crate::error::log_on_error;
use crate::library::WidgetLibrary;
use crate::utils::query_selector_all;
use gloo_timers::callback::Timeout;
use std::rc::Rc;
use web_sys::Element;

/// Danger and warning alerts stay until the user closes them.
const TRANSIENT_ALERT_SELECTOR: &str = ".alert-success, .alert-info";

/// Close the success and info alerts once `delay_ms` has elapsed. Fires a single time.
pub fn schedule_alert_dismissal(root: Element, widgets: Rc<dyn WidgetLibrary>, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        log_on_error(
            "transient alerts",
            dismiss_transient_alerts(&root, widgets.as_ref()),
        );
    })
    .forget();
}

pub fn dismiss_transient_alerts(root: &Element, widgets: &dyn WidgetLibrary) -> Result<()> {
    let alerts = query_selector_all(root, TRANSIENT_ALERT_SELECTOR)?;
    for alert in &alerts {
        log_on_error("alert", widgets.close_alert(alert));
    }

    log::debug!("Dismissed {} transient alerts", alerts.len());
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::config::EnhancerConfig;
    use crate::test_utils::{Fixture, RecordingWidgets};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const ALERTS: &str = r#"
        <div id="success" class="alert alert-success">Saved</div>
        <div id="info" class="alert alert-info">Heads up</div>
        <div id="danger" class="alert alert-danger">Failed</div>
        <div id="warning" class="alert alert-warning">Careful</div>
    "#;

    #[wasm_bindgen_test]
    fn should_only_close_success_and_info_alerts() {
        let fixture = Fixture::new(ALERTS);
        let widgets = RecordingWidgets::default();

        dismiss_transient_alerts(fixture.root(), &widgets).unwrap();

        let closed_ids = widgets
            .closed_alerts()
            .iter()
            .map(Element::id)
            .collect::<Vec<_>>();
        assert_eq!(vec!["success", "info"], closed_ids);
    }

    #[wasm_bindgen_test]
    fn should_close_remaining_alerts_when_one_fails() {
        let fixture = Fixture::new(ALERTS);
        let widgets = RecordingWidgets::rejecting(&["success"]);

        dismiss_transient_alerts(fixture.root(), &widgets).unwrap();

        let closed_ids = widgets
            .closed_alerts()
            .iter()
            .map(Element::id)
            .collect::<Vec<_>>();
        assert_eq!(vec!["info"], closed_ids);
    }

    #[wasm_bindgen_test]
    async fn should_close_alerts_after_default_delay() {
        let fixture = Fixture::new(ALERTS);
        let widgets = Rc::new(RecordingWidgets::default());
        let delay_ms = EnhancerConfig::default().alert_dismiss_delay_ms;

        schedule_alert_dismissal(fixture.root().clone(), widgets.clone(), delay_ms);

        TimeoutFuture::new(4_900).await;
        assert!(widgets.closed_alerts().is_empty());

        TimeoutFuture::new(200).await;
        assert_eq!(2, widgets.closed_alerts().len());
    }
}
