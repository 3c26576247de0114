//! RD53B (ATLAS flavour) global configuration registers.

use super::{ro, rw, RegisterSpec};

#[rustfmt::skip]
pub(super) static RD53B_REGISTERS: [RegisterSpec; 138] = [
    rw("PIX_PORTAL", 0, &[16], &[0]),
    rw("REGION_COL", 1, &[8], &[0]),
    rw("REGION_ROW", 2, &[9], &[0]),
    rw("PIX_MODE", 3, &[1, 1, 1], &[0, 1, 0]),
    rw("PIX_DEFAULT_CONFIG", 4, &[16], &[0]),
    rw("PIX_DEFAULT_CONFIG_B", 5, &[16], &[0]),
    rw("GCR_DEFAULT_CONFIG", 6, &[16], &[0]),
    rw("GCR_DEFAULT_CONFIG_B", 7, &[16], &[0]),
    rw("DAC_PREAMP_L_DIFF", 8, &[10], &[50]),
    rw("DAC_PREAMP_R_DIFF", 9, &[10], &[50]),
    rw("DAC_PREAMP_TL_DIFF", 10, &[10], &[50]),
    rw("DAC_PREAMP_TR_DIFF", 11, &[10], &[50]),
    rw("DAC_PREAMP_T_DIFF", 12, &[10], &[50]),
    rw("DAC_PREAMP_M_DIFF", 13, &[10], &[50]),
    rw("DAC_PRECOMP_DIFF", 14, &[10], &[50]),
    rw("DAC_COMP_DIFF", 15, &[10], &[50]),
    rw("DAC_VFF_DIFF", 16, &[10], &[100]),
    rw("DAC_TH1_L_DIFF", 17, &[10], &[100]),
    rw("DAC_TH1_R_DIFF", 18, &[10], &[100]),
    rw("DAC_TH1_M_DIFF", 19, &[10], &[100]),
    rw("DAC_TH2_DIFF", 20, &[10], &[0]),
    rw("DAC_LCC_DIFF", 21, &[10], &[100]),
    rw("DAC_PREAMP_L_LIN", 22, &[10], &[300]),
    rw("DAC_PREAMP_R_LIN", 23, &[10], &[300]),
    rw("DAC_PREAMP_TL_LIN", 24, &[10], &[300]),
    rw("DAC_PREAMP_TR_LIN", 25, &[10], &[300]),
    rw("DAC_PREAMP_T_LIN", 26, &[10], &[300]),
    rw("DAC_PREAMP_M_LIN", 27, &[10], &[300]),
    rw("DAC_FC_LIN", 28, &[10], &[20]),
    rw("DAC_KRUM_CURR_LIN", 29, &[10], &[50]),
    rw("DAC_REF_KRUM_LIN", 30, &[10], &[300]),
    rw("DAC_COMP_LIN", 31, &[10], &[110]),
    rw("DAC_COMP_TA_LIN", 32, &[10], &[110]),
    rw("DAC_GDAC_L_LIN", 33, &[10], &[408]),
    rw("DAC_GDAC_R_LIN", 34, &[10], &[408]),
    rw("DAC_GDAC_M_LIN", 35, &[10], &[408]),
    rw("DAC_LDAC_LIN", 36, &[10], &[100]),
    rw("LEACKAGE_FEEDBACK", 37, &[1, 1], &[0, 0]),
    rw("VOLTAGE_TRIM", 38, &[1, 1, 4, 4], &[0, 0, 8, 8]),
    rw("EnCoreCol_3", 39, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("EnCoreCol_2", 40, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreCol_1", 41, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreCol_0", 42, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_3", 43, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_2", 44, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_1", 45, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("EnCoreColumnReset_0", 46, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("TriggerConfig", 47, &[1, 9], &[0, 500]),
    rw("SelfTriggerConfig_1", 48, &[1, 1, 4], &[0, 1, 1]),
    rw("SelfTriggerConfig_0", 49, &[10, 5], &[100, 1]),
    rw("HitOrPatternLUT", 50, &[16], &[0]),
    rw("ReadTriggerConfig", 51, &[2, 12], &[0, 1000]),
    rw("TruncationTimeoutConf", 52, &[12], &[0]),
    rw("CalibrationConfig", 53, &[1, 1, 6], &[0, 0, 0]),
    rw("CLK_DATA_FINE_DELAY", 54, &[6, 6], &[0, 0]),
    rw("VCAL_HIGH", 55, &[12], &[500]),
    rw("VCAL_MED", 56, &[12], &[300]),
    rw("MEAS_CAP", 57, &[1, 1, 1], &[0, 0, 0]),
    rw("CdrConf", 58, &[1, 1, 3], &[0, 0, 0]),
    rw("ChSyncConf", 59, &[5], &[16]),
    rw("GlobalPulseConf", 60, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("GlobalPulseWidth", 61, &[8], &[1]),
    rw("ServiceDataConf", 62, &[1, 8], &[0, 50]),
    rw("ToTConfig", 63, &[1, 1, 1, 1, 9], &[0, 0, 0, 0, 500]),
    rw("PrecisionToTEnable_3", 64, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("PrecisionToTEnable_2", 65, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("PrecisionToTEnable_1", 66, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("PrecisionToTEnable_0", 67, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("DataMerging", 68, &[4, 1, 1, 1, 4, 1], &[0, 1, 1, 0, 0, 0]),
    rw("DataMergingMux", 69, &[2, 2, 2, 2, 2, 2, 2, 2], &[3, 2, 1, 0, 3, 2, 1, 0]),
    rw("EnCoreColumnCalibration_3", 70, &[1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1]),
    rw("EnCoreColumnCalibration_2", 71, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    rw("EnCoreColumnCalibration_1", 72, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    rw("EnCoreColumnCalibration_0", 73, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]),
    rw("DataConcentratorConf", 74, &[1, 1, 1, 8], &[0, 0, 1, 16]),
    rw("CoreColEncoderConf", 75, &[1, 1, 1, 4, 1, 3], &[0, 0, 0, 0, 0, 0]),
    rw("EvenMask", 76, &[16], &[0]),
    rw("OddMask", 77, &[16], &[0]),
    rw("EfusesConfig", 78, &[16], &[0]),
    rw("EfusesWriteData1", 79, &[16], &[0]),
    rw("EfusesWriteData0", 80, &[16], &[0]),
    rw("AuroraConfig", 81, &[1, 4, 6, 2], &[0, 1, 25, 3]),
    rw("AURORA_CB_CONFIG1", 82, &[8], &[255]),
    rw("AURORA_CB_CONFIG0", 83, &[12, 4], &[4095, 0]),
    rw("AURORA_INIT_WAIT", 84, &[11], &[32]),
    rw("OUTPUT_PAD_CONFIG", 85, &[4, 1, 1, 4, 3], &[5, 1, 0, 15, 7]),
    rw("GP_CMOS_ROUTE", 86, &[6], &[34]),
    rw("GP_LVDS_ROUTE_1", 87, &[6, 6], &[35, 33]),
    rw("GP_LVDS_ROUTE_0", 88, &[6, 6], &[1, 0]),
    rw("DAC_CP_CDR", 89, &[10], &[40]),
    rw("DAC_CP_FD_CDR", 90, &[10], &[400]),
    rw("DAC_CP_BUFF_CDR", 91, &[10], &[200]),
    rw("DAC_VCO_CDR", 92, &[10], &[1023]),
    rw("DAC_VCOBUFF_CDR", 93, &[10], &[500]),
    rw("SER_SEL_OUT", 94, &[2, 2, 2, 2], &[1, 1, 1, 1]),
    rw("CML_CONFIG", 95, &[2, 2, 4], &[0, 0, 1]),
    rw("DAC_CML_BIAS_2", 96, &[10], &[0]),
    rw("DAC_CML_BIAS_1", 97, &[10], &[0]),
    rw("DAC_CML_BIAS_0", 98, &[10], &[500]),
    rw("MonitorConfig", 99, &[1, 6, 6], &[0, 63, 63]),
    rw("ErrWngMask", 100, &[1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0]),
    rw("MON_SENS_SLDO", 101, &[1, 4, 1, 1, 4, 1], &[0, 0, 0, 0, 0, 0]),
    rw("MON_SENS_ACB", 102, &[1, 4, 1], &[0, 0, 0]),
    rw("MON_ADC", 103, &[1, 1, 1, 6], &[0, 0, 1, 0]),
    rw("DAC_NTC", 104, &[10], &[100]),
    rw("HITOR_MASK_3", 105, &[1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0]),
    rw("HITOR_MASK_2", 106, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("HITOR_MASK_1", 107, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("HITOR_MASK_0", 108, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("AutoRead0", 109, &[9], &[137]),
    rw("AutoRead1", 110, &[9], &[133]),
    rw("AutoRead2", 111, &[9], &[121]),
    rw("AutoRead3", 112, &[9], &[122]),
    rw("AutoRead4", 113, &[9], &[124]),
    rw("AutoRead5", 114, &[9], &[127]),
    rw("AutoRead6", 115, &[9], &[126]),
    rw("AutoRead7", 116, &[9], &[125]),
    rw("RingOscConfig", 117, &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1], &[1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0]),
    rw("RingOscRoute", 118, &[3, 6], &[0, 0]),
    ro("RING_OSC_A_OUT", 119, &[16], &[0]),
    ro("RING_OSC_B_OUT", 120, &[16], &[0]),
    ro("BCIDCnt", 121, &[16], &[0]),
    ro("TrigCnt", 122, &[16], &[0]),
    ro("ReadTrigCnt", 123, &[16], &[0]),
    ro("LockLossCnt", 124, &[16], &[0]),
    ro("BitFlipWngCnt", 125, &[16], &[0]),
    ro("BitFlipErrCnt", 126, &[16], &[0]),
    ro("CmdErrCnt", 127, &[16], &[0]),
    ro("RdWrFifoErrorCount", 128, &[16], &[0]),
    ro("AI_REGION_ROW", 129, &[9], &[0]),
    ro("HitOr_3_Cnt", 130, &[16], &[0]),
    ro("HitOr_2_Cnt", 131, &[16], &[0]),
    ro("HitOr_1_Cnt", 132, &[16], &[0]),
    ro("HitOr_0_Cnt", 133, &[16], &[0]),
    ro("SkippedTriggerCnt", 134, &[16], &[0]),
    ro("EfusesReadData1", 135, &[16], &[0]),
    ro("EfusesReadData0", 136, &[16], &[0]),
    ro("MonitoringDataADC", 137, &[12], &[0]),
];
