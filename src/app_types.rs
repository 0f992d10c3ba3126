use tauri::AppHandle;

use crate::startup_gate::StartupGate;

pub(crate) struct StartupState {
    pub(crate) startup_gate: StartupGate<AppHandle>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct BridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ShellStateBridge {
    pub(crate) startup_complete: bool,
    pub(crate) locale: String,
    pub(crate) modal_windows_created: usize,
}

#[cfg(test)]
mod tests {
    use super::ShellStateBridge;

    #[test]
    fn shell_state_bridge_serializes_with_camel_case_fields() {
        let state = ShellStateBridge {
            startup_complete: true,
            locale: "en-US".to_string(),
            modal_windows_created: 2,
        };

        let serialized = serde_json::to_value(&state).expect("serialize bridge state");
        assert_eq!(serialized["startupComplete"], true);
        assert_eq!(serialized["locale"], "en-US");
        assert_eq!(serialized["modalWindowsCreated"], 2);
    }
}
