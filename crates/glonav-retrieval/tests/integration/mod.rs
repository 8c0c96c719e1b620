mod concurrency;
mod partial_failure;
mod scenarios;
