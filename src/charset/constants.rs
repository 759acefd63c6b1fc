/// Default charset: lowercase letters, uppercase letters, digits, then the
/// 32 standard ASCII punctuation symbols, in that concatenation order.
pub const DEFAULT_CHARSET: &str = "abcdefghijklmnopqrstuvwxyz\
                                   ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                   0123456789\
                                   !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
