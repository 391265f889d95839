pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Two-decimal amount with the integer part split into groups of three by
/// single spaces, as printed on the slip (`3 949.75`).
pub fn format_amount_grouped(value: f64) -> String {
    let plain = format_amount(value);
    let (whole, frac) = match plain.split_once('.') {
        Some(parts) => parts,
        None => return plain,
    };
    let first = whole.len() % 3;
    let mut out = String::with_capacity(plain.len() + whole.len() / 3);
    out.push_str(&whole[..first]);
    let mut idx = first;
    while idx < whole.len() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&whole[idx..idx + 3]);
        idx += 3;
    }
    out.push('.');
    out.push_str(frac);
    out
}

/// Shortest round-trip decimal rendering, no trailing `.0`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

pub fn group_from_left(input: &str, size: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn group_from_right(input: &str, size: usize) -> String {
    let chars: Vec<char> = input.chars().collect();
    let head = chars.len() % size;
    let mut groups: Vec<String> = Vec::new();
    if head > 0 {
        groups.push(chars[..head].iter().collect());
    }
    for chunk in chars[head..].chunks(size) {
        groups.push(chunk.iter().collect());
    }
    groups.join(" ")
}

/// ISO 7064 mod 97-10 remainder of an alphanumeric string, letters counting
/// as 10..35.
pub fn mod97(input: &str) -> Result<u32, String> {
    let mut remainder: u32 = 0;
    for ch in input.chars() {
        let chunk = if ch.is_ascii_digit() {
            ch.to_string()
        } else if ch.is_ascii_alphabetic() {
            let val = ch.to_ascii_uppercase() as u32 - 'A' as u32 + 10;
            val.to_string()
        } else {
            return Err(format!("invalid character {:?}", ch));
        };
        for digit in chunk.chars() {
            let d = digit.to_digit(10).ok_or_else(|| "invalid digit".to_string())?;
            remainder = (remainder * 10 + d) % 97;
        }
    }
    Ok(remainder)
}

pub fn iban_check_digits(country: &str, bban: &str) -> Result<String, String> {
    if country.len() != 2 {
        return Err("IBAN country code must be 2 letters".to_string());
    }
    let remainder = mod97(&format!("{}{}00", bban, country))?;
    Ok(format!("{:02}", 98 - remainder))
}

/// Recursive modulo 10 check digit used by the Swiss QR reference.
pub fn mod10_recursive(digits: &str) -> Result<u32, String> {
    const TABLE: [u32; 10] = [0, 9, 4, 6, 8, 2, 7, 1, 3, 5];
    let mut carry = 0u32;
    for ch in digits.chars() {
        let d = ch
            .to_digit(10)
            .ok_or_else(|| format!("not a digit: {:?}", ch))?;
        carry = TABLE[((carry + d) % 10) as usize];
    }
    Ok((10 - carry) % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_amount_thousands() {
        assert_eq!(format_amount_grouped(3949.75), "3 949.75");
        assert_eq!(format_amount_grouped(199.95), "199.95");
        assert_eq!(format_amount_grouped(1234567.891), "1 234 567.89");
        assert_eq!(format_amount_grouped(0.5), "0.50");
    }

    #[test]
    fn shortest_number_rendering() {
        assert_eq!(format_number(7.7), "7.7");
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(400.19), "400.19");
    }

    #[test]
    fn check_digit_algorithms() {
        assert_eq!(iban_check_digits("CH", "04835012345678009").unwrap(), "56");
        assert_eq!(mod97("04835012345678009CH56").unwrap(), 1);
        assert_eq!(mod10_recursive("21000000000313947143000901").unwrap(), 7);
        assert!(mod10_recursive("12a").is_err());
    }

    #[test]
    fn groups_text() {
        assert_eq!(group_from_left("CH5604835012345678009", 4), "CH56 0483 5012 3456 7800 9");
        assert_eq!(
            group_from_right("210000000003139471430009017", 5),
            "21 00000 00003 13947 14300 09017"
        );
    }
}
