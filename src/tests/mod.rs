pub mod util;

#[cfg(test)]
mod pool;
#[cfg(all(test, feature = "lyon"))]
mod lyon;
