use core::cmp::PartialOrd;

/// Lower bound is checked first, so `val < lo` wins even when `hi < lo`.
#[inline]
pub fn clamp_by<T, F>(val: &mut T, lo: &T, hi: &T, mut less: F)
    where T: Clone,
          F: FnMut(&T, &T) -> bool
{
    if less(&*val, lo) {
        *val = lo.clone()
    } else if less(hi, &*val) {
        *val = hi.clone()
    }
}

#[inline]
pub fn clamp<T>(val: &mut T, lo: &T, hi: &T)
    where T: PartialOrd + Clone
{
    clamp_by(val, lo, hi, |a, b| a < b)
}

/// On `Err` from `less`, `val` is left unchanged.
pub fn try_clamp_by<T, E, F>(val: &mut T, lo: &T, hi: &T, mut less: F) -> Result<(), E>
    where T: Clone,
          F: FnMut(&T, &T) -> Result<bool, E>
{
    if less(&*val, lo)? {
        *val = lo.clone()
    } else if less(hi, &*val)? {
        *val = hi.clone()
    }
    Ok(())
}

#[inline]
pub fn clamped_by<T, F>(mut val: T, lo: &T, hi: &T, less: F) -> T
    where T: Clone,
          F: FnMut(&T, &T) -> bool
{
    clamp_by(&mut val, lo, hi, less);
    val
}

#[inline]
pub fn clamped<T>(val: T, lo: &T, hi: &T) -> T
    where T: PartialOrd + Clone
{
    clamped_by(val, lo, hi, |a, b| a < b)
}
