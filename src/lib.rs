//! Workspace tooling package. The planner lives in `crates/skyroutes-lib` and the
//! command-line interface in `crates/skyroutes-cli`.
