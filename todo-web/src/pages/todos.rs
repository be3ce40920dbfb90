use i18nrs::yew::use_translation;
use todo_shared::models::TodoDraft;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::{
    components::{todo_composer::TodoComposer, todo_item::TodoItem},
    models::{app_context::AppContext, app_state::AppState, board_state::BoardState},
};

/// The signed-in user's todo list.
#[function_component(TodoPage)]
pub fn todo_page() -> Html {
    let (i18n, ..) = use_translation();
    let context = use_context::<AppContext>();
    let token = use_selector(|state: &AppState| state.token.clone());
    let board = use_reducer(BoardState::default);
    let draft = use_state(TodoDraft::default);
    let creating = use_state(|| false);

    {
        let context = context.clone();
        let board = board.dispatcher();
        use_effect_with((*token).clone(), move |token| {
            if let Some(context) = context.filter(|_| !token.is_empty()) {
                let token = token.clone();
                spawn_local(async move {
                    if let Some(action) = context.todo_controller().list(&token).await {
                        board.dispatch(action);
                    }
                });
            }
            || ()
        });
    }

    let on_draft_change = {
        let draft = draft.clone();
        Callback::from(move |next: TodoDraft| draft.set(next))
    };

    let on_submit = {
        let context = context.clone();
        let board = board.dispatcher();
        let draft = draft.clone();
        let creating = creating.clone();
        Callback::from(move |()| {
            let Some(context) = context.clone() else {
                return;
            };
            let submitted = (*draft).clone();
            let board = board.clone();
            let draft = draft.clone();
            let creating = creating.clone();
            creating.set(true);
            spawn_local(async move {
                let token = context.session.token();
                if let Some(action) = context.todo_controller().create(&token, &submitted).await {
                    board.dispatch(action);
                    draft.set(TodoDraft::default());
                }
                creating.set(false);
            });
        })
    };

    let on_toggle = {
        let context = context.clone();
        let board = board.dispatcher();
        Callback::from(move |(id, completed): (i64, bool)| {
            let Some(context) = context.clone() else {
                return;
            };
            let board = board.clone();
            spawn_local(async move {
                let token = context.session.token();
                if let Some(action) = context.todo_controller().toggle(&token, id, completed).await {
                    board.dispatch(action);
                }
            });
        })
    };

    let on_delete = {
        let board = board.dispatcher();
        Callback::from(move |id: i64| {
            let Some(context) = context.clone() else {
                return;
            };
            let board = board.clone();
            spawn_local(async move {
                let token = context.session.token();
                if let Some(action) = context.todo_controller().delete(&token, id).await {
                    board.dispatch(action);
                }
            });
        })
    };

    let todos = board.0.todos();

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("todos.heading") }</h1>
            <div class="card bg-base-100 shadow p-4">
                <TodoComposer
                    draft={(*draft).clone()}
                    on_change={on_draft_change}
                    on_submit={on_submit}
                    disabled={*creating}
                    title_placeholder={i18n.t("todos.title_placeholder")}
                    description_placeholder={i18n.t("todos.description_placeholder")}
                    submit_label={i18n.t("todos.add")}
                />
            </div>
            if todos.is_empty() {
                <p class="text-center text-base-content/60">{ i18n.t("todos.empty") }</p>
            } else {
                <ul class="space-y-3">
                    { for todos.iter().map(|todo| html! {
                        <TodoItem
                            key={todo.id}
                            todo={todo.clone()}
                            on_toggle={on_toggle.clone()}
                            on_delete={on_delete.clone()}
                            delete_label={i18n.t("todos.delete")}
                            created_label={i18n.t("todos.created")}
                        />
                    }) }
                </ul>
            }
        </div>
    }
}
