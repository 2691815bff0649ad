use leptos::prelude::*;

/// Badge colour for a status label. Labels are shared by every record kind,
/// so one table covers candidates, clients, positions, team and interviews.
pub fn badge_class(status: &str) -> &'static str {
    match status {
        "Joined" | "Active" | "Passed" | "Completed" | "Open" => "badge badge--success",
        "Offered" | "Scheduled" => "badge badge--primary",
        "Screening" | "On Hold" | "Pending" => "badge badge--warning",
        "Rejected" | "Failed" | "Inactive" | "Closed" => "badge badge--error",
        s if s.starts_with("Interview") => "badge badge--info",
        _ => "badge badge--neutral",
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = badge_class(&status);
    view! { <span class=class>{status}</span> }
}

#[cfg(test)]
mod tests {
    use super::badge_class;

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class("Joined"), "badge badge--success");
        assert_eq!(badge_class("Interview Level 3"), "badge badge--info");
        assert_eq!(badge_class("On Hold"), "badge badge--warning");
        assert_eq!(badge_class("whatever"), "badge badge--neutral");
    }
}
