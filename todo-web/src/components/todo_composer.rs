use todo_shared::models::TodoDraft;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct TodoComposerProps {
    pub draft: TodoDraft,
    pub on_change: Callback<TodoDraft>,
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub title_placeholder: String,
    #[prop_or_default]
    pub description_placeholder: String,
    #[prop_or_default]
    pub submit_label: String,
}

/// New-todo form. Submitting is only possible once the title has content.
#[function_component(TodoComposer)]
pub fn todo_composer(props: &TodoComposerProps) -> Html {
    let on_title = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(TodoDraft {
                title: target.value(),
                ..draft.clone()
            });
        })
    };

    let on_description = {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_change.emit(TodoDraft {
                description: target.value(),
                ..draft.clone()
            });
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let submittable = props.draft.is_submittable() && !props.disabled;
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            if submittable {
                on_submit.emit(());
            }
        })
    };

    let submit_label = if props.submit_label.is_empty() {
        String::from("Add Todo")
    } else {
        props.submit_label.clone()
    };

    html! {
        <form class="space-y-3" onsubmit={on_submit}>
            <input
                class={classes!("input", "input-bordered", "w-full")}
                type="text"
                placeholder={props.title_placeholder.clone()}
                value={props.draft.title.clone()}
                oninput={on_title}
                disabled={props.disabled}
            />
            <textarea
                class={classes!("textarea", "textarea-bordered", "w-full", "min-h-[4rem]")}
                placeholder={props.description_placeholder.clone()}
                value={props.draft.description.clone()}
                oninput={on_description}
                disabled={props.disabled}
            />
            <div class="flex justify-end">
                <button
                    class="btn btn-primary"
                    type="submit"
                    disabled={props.disabled || !props.draft.is_submittable()}
                >
                    { submit_label }
                </button>
            </div>
        </form>
    }
}
