pub fn prepend<T>(to: &mut Vec<T>, pre: T) {
  to.insert(0, pre);
}

/**
 * Inserts `pre` in front of `to`, keeping the order of both.
 */
pub fn prepend_all<T>(to: &mut Vec<T>, pre: Vec<T>) {
  let mut buf = Vec::with_capacity(to.len() + pre.len());

  buf.extend(pre);
  buf.append(to);
  debug_assert!(to.is_empty());

  *to = buf
}
