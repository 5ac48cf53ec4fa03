//! `tap` / `tap_error` - observing an outcome without altering it.
//!
//! Taps fire a side-effecting action on exactly one side of the rail:
//! `tap` on success (receiving the payload), `tap_error` on non-success
//! (receiving nothing - callers needing error detail inspect the outcome
//! directly). The outcome itself passes through unchanged, so taps slot
//! anywhere into a chain. A panic raised by the action is not caught.

use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// Invokes `action` with a reference to the payload if this outcome is a
    /// `Success`, then returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::success(5).tap(|value| seen = Some(*value));
    ///
    /// assert_eq!(seen, Some(5));
    /// assert_eq!(outcome, Outcome::success(5));
    /// ```
    #[must_use]
    pub fn tap<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Invokes the asynchronous `action` with a reference to the payload if
    /// this outcome is a `Success`, then returns the outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let mut seen = None;
    /// let outcome = Outcome::success(5)
    ///     .tap_async(async |value| seen = Some(*value))
    ///     .await;
    ///
    /// assert_eq!(seen, Some(5));
    /// assert_eq!(outcome, Outcome::success(5));
    /// # });
    /// ```
    #[must_use]
    pub async fn tap_async<F>(self, action: F) -> Self
    where
        F: AsyncFnOnce(&T),
    {
        if let Self::Success(value) = &self {
            action(value).await;
        }
        self
    }

    /// Invokes `action` if this outcome is not a `Success`, then returns the
    /// outcome unchanged.
    ///
    /// The action receives no arguments by design; inspect the outcome
    /// itself when error detail is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railcar::outcome::Outcome;
    ///
    /// let mut fired = false;
    /// let outcome = Outcome::<i32>::not_found().tap_error(|| fired = true);
    ///
    /// assert!(fired);
    /// assert_eq!(outcome, Outcome::not_found());
    /// ```
    #[must_use]
    pub fn tap_error<F>(self, action: F) -> Self
    where
        F: FnOnce(),
    {
        if !self.is_success() {
            action();
        }
        self
    }

    /// Invokes the asynchronous `action` if this outcome is not a `Success`,
    /// then returns the outcome unchanged.
    #[must_use]
    pub async fn tap_error_async<F>(self, action: F) -> Self
    where
        F: AsyncFnOnce(),
    {
        if !self.is_success() {
            action().await;
        }
        self
    }
}
