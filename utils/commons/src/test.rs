//! Mock builders for collaborator contract entrypoints, used with
//! `TestHost::setup_mock_entrypoint` in unit tests.

use concordium_std::test_infrastructure::MockFn;
use concordium_std::*;

/// Mock that checks the parameter parses as `D` and responds with
/// `return_value`.
pub fn parse_and_ok_mock<D: Deserial, S>(
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _amount, _balance, _state| {
        D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        Ok((false, Some(return_value.clone())))
    })
}

/// Mock that parses the parameter as `D`, traps unless `check` accepts it,
/// and responds with `return_value`.
pub fn parse_and_check_mock<D: Deserial, S>(
    check: impl Fn(&D) -> bool + 'static,
    return_value: impl Clone + Serial + 'static,
) -> MockFn<S> {
    MockFn::new(move |parameter, _, _, _state| {
        let value =
            D::deserial(&mut Cursor::new(parameter)).map_err(|_| CallContractError::Trap)?;
        if !check(&value) {
            return Err(CallContractError::Trap);
        };
        Ok((false, Some(return_value.clone())))
    })
}

/// Mock that rejects every call with the given logic error code.
pub fn reject_mock<S>(reason: i32) -> MockFn<S> {
    MockFn::new(move |_parameter, _, _, _state: &mut S| -> Result<(bool, Option<()>), _> {
        Err(CallContractError::LogicReject {
            reason,
            return_value: (),
        })
    })
}
