use todo_shared::models::Todo;
use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct TodoItemProps {
    pub todo: Todo,
    /// Emits the id and the requested completion state.
    pub on_toggle: Callback<(i64, bool)>,
    pub on_delete: Callback<i64>,
    #[prop_or_default]
    pub delete_label: String,
    #[prop_or_default]
    pub created_label: String,
}

#[function_component(TodoItem)]
pub fn todo_item(props: &TodoItemProps) -> Html {
    let id = props.todo.id;

    let on_change = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |event: yew::events::Event| {
            let target: HtmlInputElement = event.target_unchecked_into();
            on_toggle.emit((id, target.checked()));
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_| on_delete.emit(id))
    };

    let delete_label = if props.delete_label.is_empty() {
        String::from("Delete")
    } else {
        props.delete_label.clone()
    };
    let created_label = if props.created_label.is_empty() {
        String::from("Created:")
    } else {
        props.created_label.clone()
    };

    html! {
        <li class="card bg-base-100 shadow">
            <div class="card-body flex-row items-start gap-4 p-4">
                <input
                    class="checkbox checkbox-primary mt-1"
                    type="checkbox"
                    checked={props.todo.completed}
                    onchange={on_change}
                />
                <div class="flex-grow">
                    <h3 class={classes!("text-lg", "font-medium", props.todo.completed.then_some("line-through"))}>
                        { props.todo.title.clone() }
                    </h3>
                    if let Some(description) = props.todo.visible_description() {
                        <p class="text-base-content/80">{ description.to_string() }</p>
                    }
                    <p class="text-xs text-base-content/60">
                        { format!("{created_label} {}", props.todo.created_at.date_label()) }
                    </p>
                </div>
                <button class="btn btn-error btn-sm" type="button" onclick={on_delete}>
                    { delete_label }
                </button>
            </div>
        </li>
    }
}
