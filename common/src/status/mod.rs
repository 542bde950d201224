/// Lifecycle of a value fetched by a view.
///
/// Views start in `Loading`, move to `Ready` or `Failed` exactly once per fetch,
/// and never retry on their own.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_result_maps_both_arms() {
        let ok: LoadState<u8> = LoadState::from_result::<String>(Ok(3));
        assert_eq!(ok.ready(), Some(&3));
        let failed: LoadState<u8> = LoadState::from_result(Err("sin red"));
        assert_eq!(failed, LoadState::Failed("sin red".into()));
        assert!(LoadState::<u8>::default().is_loading());
    }
}
