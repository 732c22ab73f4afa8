use super::*;

mod mock_fs;
