mod listen;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use listen::ListenView;
