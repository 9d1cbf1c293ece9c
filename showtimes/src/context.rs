use std::sync::Arc;

use showtimes_syntax::Vocabulary;

/// How a weekday is looked up in a list of days such as `Sat/Tu`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum DayMatching {
    /// The list is split into day tokens and ranges which are resolved with
    /// the vocabulary.
    #[default]
    Exact,
    /// A day is listed if its code appears anywhere in the text of the list.
    ///
    /// This reproduces the historical output of the listings, where `W`
    /// would for instance be found in any word containing a capital W.
    Substring,
}

/// All the context that can alter how a cell is read and evaluated.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    pub vocabulary: Arc<Vocabulary>,
    pub matching: DayMatching,
}

impl Context {
    /// Attach a new vocabulary to this context.
    ///
    /// ```
    /// use showtimes::Context;
    /// use showtimes_syntax::Vocabulary;
    ///
    /// let ctx = Context::default().with_vocabulary(Vocabulary::german());
    /// assert_eq!(ctx, Context::default());
    /// ```
    pub fn with_vocabulary(self, vocabulary: impl Into<Arc<Vocabulary>>) -> Self {
        Self { vocabulary: vocabulary.into(), ..self }
    }

    /// Select how days are matched against lists of days.
    pub fn with_matching(self, matching: DayMatching) -> Self {
        Self { matching, ..self }
    }
}

impl Default for Context {
    /// German vocabulary with exact day matching. Use
    /// `with_matching(DayMatching::Substring)` to reproduce the historical
    /// output of the listings.
    fn default() -> Self {
        Self {
            vocabulary: Arc::new(Vocabulary::german()),
            matching: DayMatching::default(),
        }
    }
}
