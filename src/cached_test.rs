use super::*;
use std::cell::Cell;

mod call {
    use super::*;

    #[test]
    fn should_invoke_function_once_when_called_repeatedly() {
        // Arrange
        let invocations = Cell::new(0);
        let counter = cached(|| {
            invocations.set(invocations.get() + 1);
            invocations.get()
        });

        // Act
        let results = [*counter.call(), *counter.call(), *counter.call()];

        // Assert
        assert_eq!(results, [1, 1, 1]);
        assert_eq!(invocations.get(), 1);
    }

    #[test]
    fn should_not_invoke_function_when_constructed() {
        // Arrange
        let invocations = Cell::new(0);

        // Act
        let wrapper = cached(|| invocations.set(invocations.get() + 1));

        // Assert
        assert_eq!(invocations.get(), 0);
        assert!(!wrapper.is_cached());
    }

    #[test]
    fn should_return_same_reference_when_result_is_cached() {
        let wrapper = cached(|| vec![1, 2, 3]);

        let first: *const Vec<i32> = wrapper.call();
        let second: *const Vec<i32> = wrapper.call();

        assert_eq!(first, second);
    }
}

mod try_call {
    use super::*;

    #[test]
    fn should_retry_function_when_first_call_fails() {
        // Arrange
        let invocations = Cell::new(0);
        let flaky = Cached::new(|| {
            invocations.set(invocations.get() + 1);
            if invocations.get() == 1 {
                Err("temporary failure")
            } else {
                Ok(invocations.get() * 10)
            }
        });

        // Act & Assert
        assert_eq!(flaky.try_call(), Err("temporary failure"));
        assert_eq!(invocations.get(), 1);
        assert!(!flaky.is_cached());

        assert_eq!(flaky.try_call(), Ok(&20));
        assert_eq!(flaky.try_call(), Ok(&20));
        assert_eq!(invocations.get(), 2);
    }

    #[test]
    fn should_cache_first_success_when_function_never_fails() {
        let invocations = Cell::new(0);
        let stable = Cached::new(|| {
            invocations.set(invocations.get() + 1);
            Ok::<_, ()>("ready")
        });

        assert_eq!(stable.try_call(), Ok(&"ready"));
        assert_eq!(stable.try_call(), Ok(&"ready"));
        assert_eq!(invocations.get(), 1);
    }
}

mod get {
    use super::*;

    #[test]
    fn should_return_none_before_first_call() {
        let wrapper = cached(|| 7);

        assert_eq!(wrapper.get(), None);
    }

    #[test]
    fn should_return_cached_value_after_call() {
        let wrapper = cached(|| 7);
        wrapper.call();

        assert_eq!(wrapper.get(), Some(&7));
    }
}

mod into_inner {
    use super::*;

    #[test]
    fn should_hand_back_cached_value() {
        let wrapper = cached(|| "value".to_string());
        wrapper.call();

        assert_eq!(wrapper.into_inner().as_deref(), Some("value"));
    }

    #[test]
    fn should_return_none_when_never_called() {
        let wrapper = cached(|| "value".to_string());

        assert_eq!(wrapper.into_inner(), None);
    }
}

mod debug {
    use super::*;

    #[test]
    fn should_show_cached_result() {
        let wrapper = cached(|| 3);
        wrapper.call();

        assert_eq!(format!("{wrapper:?}"), "Cached { result: Some(3), .. }");
    }
}
