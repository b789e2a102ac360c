use cutover::EnvironmentStatus;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_status(
    status: &EnvironmentStatus,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(
        Icon::Remote,
        format!("Cutover Status: {}", status.environment.label()),
    );
    header.add("Host", status.host.as_str());
    header.add(
        "Current",
        status
            .current_release
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(no current release)".to_string()),
    );
    header.add(
        "Revision",
        status
            .revision
            .as_ref()
            .map(|r| r.as_str().to_string())
            .unwrap_or_else(|| "-".to_string()),
    );

    let mut out = header.render(supports_color, supports_unicode);
    if status.releases.is_empty() {
        return out;
    }

    let current = status
        .current_release
        .as_ref()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned());
    let orphaned = status.orphaned();

    out.push_str(&format!(
        "\n{}\n",
        ColoredText::dim(format!("Releases ({})", status.releases.len())).render(supports_color)
    ));
    for id in status.releases.iter().rev() {
        let name = id.to_string();
        let line = if current.as_deref() == Some(name.as_str()) {
            format!(
                "{} {}",
                Icon::Success.colored(supports_color, supports_unicode),
                ColoredText::success(format!("{name} (current)")).render(supports_color)
            )
        } else if orphaned.contains(id) {
            format!(
                "{} {}",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!("{name} (never promoted)")).render(supports_color)
            )
        } else {
            format!(
                "{} {}",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::plain(name).render(supports_color)
            )
        };
        out.push_str(&format!("  {line}\n"));
    }
    out
}

pub fn status_to_json(status: &EnvironmentStatus) -> serde_json::Value {
    serde_json::json!({
        "event": "status",
        "environment": status.environment.segment(),
        "host": status.host,
        "current_release": status.current_release.as_ref().map(|p| p.display().to_string()),
        "revision": status.revision.as_ref().map(|r| r.as_str().to_string()),
        "releases": status.releases.iter().map(|id| id.to_string()).collect::<Vec<_>>(),
        "orphaned": status.orphaned().iter().map(|id| id.to_string()).collect::<Vec<_>>(),
    })
}
