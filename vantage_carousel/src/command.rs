// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A carousel transition, as bound to a user-interaction control.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Command {
    /// Open the overlay on an item index.
    Open(usize),
    /// Close the overlay.
    Close,
    /// Step forward with wraparound.
    Next,
    /// Step backward with wraparound.
    Prev,
}
