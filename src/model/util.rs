/// 保留一位小数
pub fn round_to_one_decimal(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// 查询词归一化：去掉首尾空白并转为小写
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// 非字母之后的字母大写，其余小写，空白原样保留
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for ch in text.chars() {
        if prev_is_letter {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_is_letter = ch.is_alphabetic();
    }
    out
}

/// URL 路径片段：空格替换为 '-'
pub fn slugify(text: &str) -> String {
    text.replace(' ', "-")
}

/// 千位分隔符，例如 45000 -> "45,000"
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
