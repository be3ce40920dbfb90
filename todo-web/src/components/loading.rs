use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingProps {
    #[prop_or_default]
    pub label: String,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    let label = if props.label.is_empty() {
        String::from("Loading")
    } else {
        props.label.clone()
    };

    html! {
        <div class="flex items-center justify-center py-12">
            <span class="loading loading-dots loading-md" aria-label={label}></span>
        </div>
    }
}
