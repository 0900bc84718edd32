//! Parallelization helpers for per-pixel operations
//!
//! Small images stay sequential (thread dispatch would dominate); large
//! images run on the rayon pool. Only elementwise transforms go through
//! these helpers: chunk boundaries cannot change their results, so output
//! stays bit-identical regardless of thread count. Statistics reductions
//! elsewhere in the crate are deliberately sequential for the same reason.

use rayon::prelude::*;

/// Pixel count above which elementwise work is dispatched to the rayon pool.
pub(crate) const PARALLEL_THRESHOLD: usize = 100_000;

/// Number of groups batched per parallel work item for cache locality.
const BATCH_GROUPS: usize = 256;

/// Apply `op` to every consecutive `chunk_size` group of `data`.
///
/// Groups are batched so the pool sees coarse work items rather than one
/// item per pixel.
pub(crate) fn for_each_chunk_mut<T, F>(data: &mut [T], chunk_size: usize, op: F)
where
    T: Send,
    F: Fn(&mut [T]) + Sync,
{
    let num_groups = data.len() / chunk_size;
    if num_groups >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(chunk_size * BATCH_GROUPS).for_each(|batch| {
            for chunk in batch.chunks_exact_mut(chunk_size) {
                op(chunk);
            }
        });
    } else {
        for chunk in data.chunks_exact_mut(chunk_size) {
            op(chunk);
        }
    }
}

/// Apply `op` to every row of a row-major buffer, passing the row index.
pub(crate) fn for_each_row_mut<T, F>(data: &mut [T], row_len: usize, op: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_chunks_mut(row_len)
            .enumerate()
            .for_each(|(y, row)| op(y, row));
    } else {
        for (y, row) in data.chunks_mut(row_len).enumerate() {
            op(y, row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunked_transform_visits_every_group() {
        let mut data = vec![1u8; 3 * 10];
        for_each_chunk_mut(&mut data, 3, |px| {
            px[0] = 2;
            px[2] = 3;
        });
        for px in data.chunks_exact(3) {
            assert_eq!(px, &[2, 1, 3]);
        }
    }

    #[test]
    fn row_transform_passes_row_indices() {
        let mut data = vec![0usize; 4 * 5];
        for_each_row_mut(&mut data, 4, |y, row| {
            for v in row.iter_mut() {
                *v = y;
            }
        });
        for (y, row) in data.chunks_exact(4).enumerate() {
            assert!(row.iter().all(|&v| v == y));
        }
    }
}
