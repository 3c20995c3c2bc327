/// Calls `callback` on consecutive `batch_size` slices of `items`; the last
/// slice may be shorter. Returns the number of calls made.
///
/// A zero batch size makes no calls.
pub fn process_in_batches<T, F>(items: &[T], batch_size: usize, mut callback: F) -> usize
where
    F: FnMut(&[T]),
{
    if batch_size == 0 {
        log::debug!("process_in_batches: zero batch size, {} items skipped", items.len());
        return 0;
    }
    let mut calls = 0;
    for batch in items.chunks(batch_size) {
        callback(batch);
        calls += 1;
    }
    calls
}
