mod tests {
    use fibonacci_reel::{
        Button, ButtonInput, Command, CommandQueue, Direction, InputDispatcher, NoInput,
        ReleaseLatch,
    };

    struct Pressed {
        pattern: bool,
        brightness: bool,
    }

    impl ButtonInput for Pressed {
        fn pattern_released(&mut self) -> bool {
            core::mem::take(&mut self.pattern)
        }

        fn brightness_released(&mut self) -> bool {
            core::mem::take(&mut self.brightness)
        }
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = CommandQueue::<4>::new();
        assert!(queue.is_empty());
        queue.push(Command::SetPower(false)).unwrap();
        queue.push_brightness(Direction::Backward).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(Command::SetPower(false)));
        assert_eq!(
            queue.pop(),
            Some(Command::AdvanceBrightness(Direction::Backward))
        );
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_full_queue_returns_command() {
        let mut queue = CommandQueue::<1>::new();
        queue.push_power(true).unwrap();
        assert_eq!(queue.push_power(false), Err(Command::SetPower(false)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_manual_pattern_is_all_or_nothing() {
        let mut queue = CommandQueue::<3>::new();
        queue.push_power(true).unwrap();
        queue.push_manual_pattern(Direction::Forward).unwrap();
        assert_eq!(queue.len(), 3);

        let mut queue = CommandQueue::<3>::new();
        queue.push_power(true).unwrap();
        queue.push_power(true).unwrap();
        assert_eq!(
            queue.push_manual_pattern(Direction::Forward),
            Err(Command::AdvancePattern(Direction::Forward))
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_dispatch_order() {
        let mut queue = CommandQueue::<8>::new();
        let mut input = Pressed {
            pattern: true,
            brightness: true,
        };
        InputDispatcher::dispatch(&mut input, &mut queue);

        assert_eq!(queue.pop(), Some(Command::DisableAutoplay));
        assert_eq!(
            queue.pop(),
            Some(Command::AdvancePattern(Direction::Forward))
        );
        assert_eq!(
            queue.pop(),
            Some(Command::AdvanceBrightness(Direction::Forward))
        );
        assert!(queue.is_empty());

        // Releases are edges, the next poll reports nothing
        InputDispatcher::dispatch(&mut input, &mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_no_input() {
        let mut queue = CommandQueue::<8>::new();
        InputDispatcher::dispatch(&mut NoInput, &mut queue);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_release_latch() {
        let latch = ReleaseLatch::new();
        assert!(!latch.take(Button::Pattern));

        latch.release(Button::Pattern);
        latch.release(Button::Pattern);
        assert!(!latch.take(Button::Brightness));
        assert!(latch.take(Button::Pattern));
        assert!(!latch.take(Button::Pattern));
    }

    #[test]
    fn test_release_latch_as_input() {
        static LATCH: ReleaseLatch = ReleaseLatch::new();
        LATCH.release(Button::Brightness);

        let mut input = &LATCH;
        assert!(!input.pattern_released());
        assert!(input.brightness_released());
        assert!(!input.brightness_released());
    }
}
