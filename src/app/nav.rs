// Cross-platform opener: http(s) and mailto targets go to the system
// default handler, never replacing the app window.

pub fn open_in_browser(target: &str) {
    #[cfg(target_os = "windows")]
    {
        // explorer resolves the default handler without invoking a shell
        if let Err(e) = std::process::Command::new("explorer").arg(target).spawn() {
            log::error!("Failed to open {}: {}", target, e);
        }
    }
    #[cfg(target_os = "macos")]
    {
        if let Err(e) = std::process::Command::new("open").arg(target).spawn() {
            log::error!("Failed to open {}: {}", target, e);
        }
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        if let Err(e) = std::process::Command::new("xdg-open").arg(target).spawn() {
            log::error!("Failed to open {}: {}", target, e);
        }
    }
}
