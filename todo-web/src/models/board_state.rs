use std::rc::Rc;

use todo_shared::todos::{TodoAction, TodoBoard};
use yew::Reducible;

/// `use_reducer` wrapper around the shared board.
#[derive(Debug, Default, PartialEq)]
pub struct BoardState(pub TodoBoard);

impl Reducible for BoardState {
    type Action = TodoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.clone().applied(action)))
    }
}
