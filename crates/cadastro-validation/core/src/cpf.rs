//! CPF (Cadastro de Pessoas Físicas) check-digit validation.

use crate::contact::digits_only;
use crate::error::ValidationError;

const CPF_LEN: usize = 11;

/// Mod-11 check digit over `digits`, weights descending from `len + 1` to 2.
fn check_digit(digits: &[u8]) -> u8 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 => 0,
        r => r as u8,
    }
}

/// Computes both check digits for the first nine digits of a CPF.
pub fn cpf_check_digits(first_nine: &[u8; 9]) -> (u8, u8) {
    let first = check_digit(first_nine);
    let mut ten = [0u8; 10];
    ten[..9].copy_from_slice(first_nine);
    ten[9] = first;
    (first, check_digit(&ten))
}

/// Validates a CPF, formatted (`529.982.247-25`) or bare.
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    let digits: Vec<u8> = digits_only(value).bytes().map(|b| b - b'0').collect();

    if digits.len() != CPF_LEN || digits.iter().all(|&d| d == digits[0]) {
        return Err(ValidationError::MalformedCpf);
    }

    if check_digit(&digits[..9]) != digits[9] {
        return Err(ValidationError::InvalidChecksum);
    }
    if check_digit(&digits[..10]) != digits[10] {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("52998224725")]
    #[case("529.982.247-25")]
    #[case("111.444.777-35")]
    fn test_valid_cpfs(#[case] cpf: &str) {
        assert_eq!(validate_cpf(cpf), Ok(()));
    }

    #[rstest]
    #[case("11111111111")]
    #[case("000.000.000-00")]
    #[case("99999999999")]
    fn test_repeated_digits_rejected(#[case] cpf: &str) {
        assert_eq!(validate_cpf(cpf), Err(ValidationError::MalformedCpf));
    }

    #[rstest]
    #[case("")]
    #[case("5299822472")]
    #[case("529982247250")]
    #[case("abc.def.ghi-jk")]
    fn test_wrong_length_rejected(#[case] cpf: &str) {
        assert_eq!(validate_cpf(cpf), Err(ValidationError::MalformedCpf));
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(
            validate_cpf("529.982.247-35"),
            Err(ValidationError::InvalidChecksum)
        );
        assert_eq!(
            validate_cpf("529.982.247-26"),
            Err(ValidationError::InvalidChecksum)
        );
    }

    #[test]
    fn test_every_single_digit_mutation_is_rejected() {
        for valid in ["52998224725", "11144477735"] {
            let original: Vec<u8> = valid.bytes().map(|b| b - b'0').collect();
            for position in 0..CPF_LEN {
                for replacement in 0..=9u8 {
                    if replacement == original[position] {
                        continue;
                    }
                    let mutated: String = original
                        .iter()
                        .enumerate()
                        .map(|(i, &d)| if i == position { replacement } else { d })
                        .map(|d| char::from(b'0' + d))
                        .collect();
                    assert!(
                        validate_cpf(&mutated).is_err(),
                        "mutation {mutated} of {valid} was accepted"
                    );
                }
            }
        }
    }

    #[test]
    fn test_check_digits_build_valid_cpfs() {
        let first_nine = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let (first, second) = cpf_check_digits(&first_nine);
        assert_eq!((first, second), (0, 9));
        assert_eq!(validate_cpf("123.456.789-09"), Ok(()));
    }
}
