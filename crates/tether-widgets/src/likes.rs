use std::rc::Rc;

use tether_core::prelude::*;

/// Closed action vocabulary. There is deliberately no catch-all variant, so
/// an out-of-vocabulary dispatch cannot be written at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Dislike,
    Reset,
}

/// Reducer for the like counter. The transition function is pure and total
/// over the closed vocabulary; the match is exhaustive, no default arm.
pub struct LikeFeed;

impl StateHolder for LikeFeed {
    type State = i64;
    type Action = LikeAction;

    fn initial_state() -> i64 {
        0
    }

    fn reduce(state: &i64, action: LikeAction) -> i64 {
        match action {
            LikeAction::Like => state + 1,
            LikeAction::Dislike => state - 1,
            LikeAction::Reset => 0,
        }
    }
}

#[derive(Clone)]
pub struct LikeBinding {
    cell: Rc<ReducerCell<LikeFeed>>,
    pub dispatch: Rc<dyn Fn(LikeAction)>,
}

impl LikeBinding {
    pub fn likes(&self) -> i64 {
        self.cell.get()
    }
}

pub fn LikeCounter() -> LikeBinding {
    let cell = remember(ReducerCell::<LikeFeed>::new);

    LikeBinding {
        cell: cell.clone(),
        dispatch: Rc::new(move |action| cell.dispatch(action)),
    }
}
