mod distance_tests;
mod helpers;
mod lifecycle_tests;
mod traversal_tests;
