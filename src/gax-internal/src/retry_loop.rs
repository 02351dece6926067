// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Repeats a unary RPC until it succeeds or the retry policy gives up.

use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::error::Error;
use gax::retry_policy::RetryPolicy;
use gax::retry_result::RetryResult;
use gax::retry_state::RetryState;
use gax::retry_throttler::{RetryThrottler, SharedRetryThrottler};
use gax::throttle_result::ThrottleResult;
use std::sync::Arc;
use std::time::Duration;

/// The policies controlling one call to [retry_loop].
#[derive(Clone, Debug)]
pub struct Policies {
    pub idempotent: bool,
    pub retry: Arc<dyn RetryPolicy>,
    pub backoff: Arc<dyn BackoffPolicy>,
    pub throttler: SharedRetryThrottler,
}

/// Calls `attempt` until it succeeds or `policies` stop the loop.
///
/// `attempt` receives the time left before the retry policy expires, if the
/// policy has a deadline. Between attempts the loop waits for the backoff
/// delay using `sleep`. A delay that does not fit in the remaining time ends
/// the loop with an [exhausted][Error::is_exhausted] error.
///
/// When the throttler rejects a retry the loop waits again without making an
/// attempt, the retry policy decides if the loop may continue.
pub async fn retry_loop<A, AFut, S, SFut, Response>(
    mut attempt: A,
    sleep: S,
    policies: Policies,
) -> Result<Response>
where
    A: FnMut(Option<Duration>) -> AFut + Send,
    AFut: Future<Output = Result<Response>> + Send,
    S: Fn(Duration) -> SFut + Send,
    SFut: Future<Output = ()> + Send,
{
    let start = tokio::time::Instant::now().into_std();
    let mut state = RetryState::new(policies.idempotent).set_start(start);
    loop {
        let remaining_time = policies.retry.remaining_time(&state);
        let attempt_count = state.attempt_count + 1;
        state = state.set_attempt_count(attempt_count);
        let error = match attempt(remaining_time).await {
            Ok(response) => {
                with_throttler(&policies.throttler, |t| t.on_success());
                return Ok(response);
            }
            Err(e) => e,
        };
        let flow = policies.retry.on_error(&state, error);
        with_throttler(&policies.throttler, |t| t.on_retry_failure(&flow));
        let mut error = match flow {
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
            RetryResult::Continue(e) => e,
        };
        loop {
            let delay = policies.backoff.on_failure(&state);
            let remaining_time = policies.retry.remaining_time(&state);
            if remaining_time.is_some_and(|r| r < delay) {
                return Err(Error::exhausted(error));
            }
            tracing::debug!(
                "retrying after attempt {} in {delay:?}: {error}",
                state.attempt_count
            );
            sleep(delay).await;
            if !with_throttler(&policies.throttler, |t| t.throttle_retry_attempt()) {
                break;
            }
            error = match policies.retry.on_throttle(&state, error) {
                ThrottleResult::Exhausted(e) => return Err(e),
                ThrottleResult::Continue(e) => e,
            };
        }
    }
}

// A poisoned throttler is skipped, it only holds statistics.
fn with_throttler<T, F>(throttler: &SharedRetryThrottler, f: F) -> T
where
    T: Default,
    F: FnOnce(&mut dyn RetryThrottler) -> T,
{
    match throttler.lock() {
        Ok(mut guard) => f(&mut *guard),
        Err(_) => T::default(),
    }
}
