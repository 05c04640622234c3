use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A block tag, as accepted by RPC methods in place of a block number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// The genesis block
    Earliest,
    /// The latest mined block
    Latest,
    /// The block currently being assembled
    Pending,
}

impl Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockTag::Earliest => "earliest",
            BlockTag::Latest => "latest",
            BlockTag::Pending => "pending",
        })
    }
}

/// A block argument for RPC methods that accept either a block number or
/// a tag. Both forms are forwarded to the node uninterpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockSpec {
    /// A block by number
    #[serde(with = "crate::serde::u64")]
    Number(u64),
    /// A block by tag
    Tag(BlockTag),
}

impl BlockSpec {
    /// Constructs an instance for the earliest block.
    #[must_use]
    pub fn earliest() -> Self {
        Self::Tag(BlockTag::Earliest)
    }

    /// Constructs an instance for the latest block.
    #[must_use]
    pub fn latest() -> Self {
        Self::Tag(BlockTag::Latest)
    }

    /// Constructs an instance for the pending block.
    #[must_use]
    pub fn pending() -> Self {
        Self::Tag(BlockTag::Pending)
    }
}

impl Display for BlockSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockSpec::Number(number) => write!(f, "{}", crate::codec::encode_quantity_u64(*number)),
            BlockSpec::Tag(tag) => tag.fmt(f),
        }
    }
}
