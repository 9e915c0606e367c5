// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrCode {
    /// Assignment does not split into a target and a value
    ASG1000     = 1000,

    /// String declaration segment without a name or `:=`
    DCL1000     = 2000,

    /// Unknown type keyword in a variable declaration
    DCL1001     = 2001,
}

impl fmt::Display for ErrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
