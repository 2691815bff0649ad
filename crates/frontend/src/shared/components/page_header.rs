use leptos::prelude::*;

/// PageHeader component - title row shared by all pages
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons on the right
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                {move || subtitle.get().map(|s| view! {
                    <div class="page__subtitle">{s}</div>
                })}
            </div>
            <div class="page__header-right">
                {children.map(|c| c())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_children_are_optional() {
        // header without action buttons builds from the title alone
        let _props: PageHeaderProps = PageHeaderProps::builder().title("Clients").build();
        let _props: PageHeaderProps = PageHeaderProps::builder()
            .title("Dashboard")
            .subtitle("Welcome back")
            .build();
    }
}
