//! User-facing strings.

pub struct UiText {
    pub window_title: &'static str,
    pub app_heading: &'static str,
    pub results_heading: &'static str,
    pub results_placeholder: &'static str,
    pub analyze_button: &'static str,
    pub export_button: &'static str,
    pub exit_button: &'static str,
    pub dialog_ok_button: &'static str,
    pub input_error_title: &'static str,
    pub input_error_message: &'static str,
    pub export_failed_title: &'static str,
    pub export_nothing_message: &'static str,
    pub export_write_failed_message_prefix: &'static str,
    pub export_success_title: &'static str,
    pub export_success_message_prefix: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "🌾 Smart Rice Crop Advisor",
    app_heading: "🌾 Smart Rice Crop Advisor",
    results_heading: "📋 Crop Condition Suggestions",
    results_placeholder: "Enter the four readings and press Analyze.",
    analyze_button: "📊 Analyze Crop Conditions",
    export_button: "📝 Export Report",
    exit_button: "❌ Exit",
    dialog_ok_button: "OK",
    input_error_title: "Input Error",
    input_error_message: "❌ Please enter valid numeric values only!",
    export_failed_title: "Export Failed",
    export_nothing_message: "⚠️ No result to export!",
    export_write_failed_message_prefix: "⚠️ Could not write the report to",
    export_success_title: "Export Successful",
    export_success_message_prefix: "✅ Report saved as",
};
