//! Tests for the service layer, exercising business rules directly against the database.

mod application;
mod credential;

use jobboard_test_utils::prelude::*;
