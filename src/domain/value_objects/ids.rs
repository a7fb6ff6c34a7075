//! # Identifiers
//!
//! UUID-backed identity types for the transfer market.
//!
//! Every identifier is an opaque, immutable, globally unique token. Distinct
//! newtypes keep a [`PlayerId`] from ever being passed where a [`ClubId`] is
//! expected.
//!
//! # Examples
//!
//! ```
//! use transfer_market::domain::value_objects::{ClubId, PlayerId};
//!
//! let club = ClubId::new_v4();
//! let parsed: ClubId = club.to_string().parse().unwrap();
//! assert_eq!(club, parsed);
//!
//! let player = PlayerId::new_v4();
//! assert_ne!(player.as_uuid(), club.as_uuid());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing UUID.
            #[inline]
            #[must_use]
            pub const fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Generates a new random identifier.
            #[must_use]
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the underlying UUID.
            #[inline]
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

uuid_id! {
    /// Identifier of a club (one tenant of the market).
    ClubId
}

uuid_id! {
    /// Identifier of a player.
    PlayerId
}

uuid_id! {
    /// Identifier of a negotiation (a transfer offer).
    NegotiationId
}

uuid_id! {
    /// Identifier of a completed transfer in the ledger.
    TransferId
}
