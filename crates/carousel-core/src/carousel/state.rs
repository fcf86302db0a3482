use crate::source::ImageList;

use super::view::{derive_view_model, ViewModel};

/// Navigation position over an image list.
///
/// `Active` holds `current_index < total` as long as only [`next`],
/// [`previous`] and in-range [`go_to`] calls are made. `go_to` itself does
/// not check bounds.
///
/// [`next`]: CarouselState::next
/// [`previous`]: CarouselState::previous
/// [`go_to`]: CarouselState::go_to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselState {
    Empty,
    Active { current_index: usize, total: usize },
}

impl CarouselState {
    pub fn initialize(images: &ImageList) -> Self {
        Self::with_total(images.len())
    }

    pub fn with_total(total: usize) -> Self {
        if total == 0 {
            Self::Empty
        } else {
            Self::Active {
                current_index: 0,
                total,
            }
        }
    }

    /// Advance one slide. No-op on the last slide and on `Empty`.
    pub fn next(self) -> Self {
        match self {
            Self::Active {
                current_index,
                total,
            } if current_index < total - 1 => Self::Active {
                current_index: current_index + 1,
                total,
            },
            other => other,
        }
    }

    /// Step back one slide. No-op on the first slide and on `Empty`.
    pub fn previous(self) -> Self {
        match self {
            Self::Active {
                current_index,
                total,
            } if current_index > 0 => Self::Active {
                current_index: current_index - 1,
                total,
            },
            other => other,
        }
    }

    /// Jump straight to `index`. The index is taken verbatim, so an
    /// out-of-range value yields a state whose view model points past the
    /// last slide. Callers holding untrusted indices should check
    /// [`contains`](Self::contains) first. `Empty` has no index to set.
    pub fn go_to(self, index: usize) -> Self {
        match self {
            Self::Active { total, .. } => Self::Active {
                current_index: index,
                total,
            },
            Self::Empty => Self::Empty,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            Self::Active { current_index, .. } => Some(*current_index),
            Self::Empty => None,
        }
    }

    pub fn total(&self) -> usize {
        match self {
            Self::Active { total, .. } => *total,
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether `index` names an existing slide.
    pub fn contains(&self, index: usize) -> bool {
        index < self.total()
    }

    pub fn view_model(&self) -> ViewModel {
        derive_view_model(self)
    }
}
