//! Join-of-three aggregation used by the property loader.

use std::future::Future;

/// Drive three fallible futures concurrently and wait for all of them.
///
/// Unlike `try_join!`, this never short-circuits: the result is computed
/// only after every future has settled. On failure the first error in
/// argument order is returned and the successful results are dropped.
pub async fn settle_all<A, B, C, E, FA, FB, FC>(a: FA, b: FB, c: FC) -> Result<(A, B, C), E>
where
    FA: Future<Output = Result<A, E>>,
    FB: Future<Output = Result<B, E>>,
    FC: Future<Output = Result<C, E>>,
{
    let (a, b, c) = tokio::join!(a, b, c);
    Ok((a?, b?, c?))
}
