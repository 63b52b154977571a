mod tests {
    use prysma_light::{
        CommandChannel, LightCommand, Rgb,
        channel::{TryReceiveError, TrySendError},
    };

    #[test]
    fn test_fifo_order() {
        let channel: CommandChannel<4> = CommandChannel::new();
        let sender = channel.sender();
        let receiver = channel.receiver();

        sender.try_send(LightCommand::TurnOn).unwrap();
        sender.try_send(LightCommand::SetColor(Rgb::new(1, 2, 3))).unwrap();
        assert_eq!(channel.len(), 2);

        assert_eq!(receiver.try_receive(), Ok(LightCommand::TurnOn));
        assert_eq!(
            receiver.try_receive(),
            Ok(LightCommand::SetColor(Rgb::new(1, 2, 3)))
        );
        assert_eq!(receiver.try_receive(), Err(TryReceiveError));
        assert!(channel.is_empty());
    }

    #[test]
    fn test_full_channel_returns_command() {
        let channel: CommandChannel<2> = CommandChannel::new();
        channel.try_send(LightCommand::TurnOn).unwrap();
        channel.try_send(LightCommand::TurnOff).unwrap();
        assert!(channel.is_full());
        assert_eq!(
            channel.try_send(LightCommand::Identify),
            Err(TrySendError(LightCommand::Identify))
        );

        channel.clear();
        assert!(channel.is_empty());
        assert_eq!(channel.capacity(), 2);
    }
}
