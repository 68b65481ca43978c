mod list_test;
mod remove_test;
mod rollback_test;
mod update_test;
