mod completion_e2e;
mod providers;
