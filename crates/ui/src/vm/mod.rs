mod listen_vm;

pub use listen_vm::{ListenVm, SelectOptionVm, map_listen_vm};
